use crate::{
    api::{assistant, attendance, employee, settings, summary},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::middleware::Condition;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = 60_000 / requests_per_min as u64;
        let governor_cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms.max(1))
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&governor_cfg)
    }

    // RATE_API_PER_MIN=0 disables rate limiting entirely.
    let rate_limited = config.rate_api_per_min > 0;
    let api_limiter = build_limiter(config.rate_api_per_min.max(1));

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(rate_limited, api_limiter))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance?date=YYYY-MM-DD
                    .service(web::resource("").route(web::get().to(attendance::day_records)))
                    // /attendance/record?date=...&employeeId=...
                    .service(
                        web::resource("/record").route(web::get().to(attendance::employee_record)),
                    )
                    .service(web::resource("/status").route(web::put().to(attendance::set_status)))
                    .service(
                        web::resource("/payment").route(web::put().to(attendance::set_payment)),
                    ),
            )
            .service(
                web::scope("/summary")
                    // /summary?month=YYYY-MM
                    .service(web::resource("").route(web::get().to(summary::get_summary)))
                    .service(web::resource("/months").route(web::get().to(summary::list_months))),
            )
            .service(
                web::resource("/settings")
                    .route(web::get().to(settings::get_settings))
                    .route(web::put().to(settings::update_settings)),
            )
            .service(web::resource("/assistant").route(web::post().to(assistant::proxy))),
    );
}
