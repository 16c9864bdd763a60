use crate::{
    api::{admin, chatbot, department, employee, event, leave, salary},
    auth::handlers,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Per-route limiter; a rate of 0 disables limiting for that route
    // (used by trusted deployments and the test harness).
    fn governor_for(requests_per_min: u32) -> Condition<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min.max(1))
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Condition::new(requests_per_min > 0, Governor::new(&cfg))
    }

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/register")
                    .wrap(governor_for(config.rate_register_per_min))
                    .route(web::post().to(handlers::register)),
            )
            .service(
                web::resource("/login")
                    .wrap(governor_for(config.rate_login_per_min))
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/refresh")
                    .wrap(governor_for(config.rate_refresh_per_min))
                    .route(web::post().to(handlers::refresh_token)),
            )
            .service(
                web::resource("/logout")
                    .wrap(governor_for(config.rate_login_per_min))
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Resource routes; the access policy middleware has already run by the
    // time any of these execute.
    cfg.service(
        web::scope("/api")
            .wrap(governor_for(config.rate_protected_per_min))
            .service(
                web::scope("/auth")
                    .service(web::resource("/me").route(web::get().to(handlers::me))),
            )
            .service(
                web::scope("/admins")
                    .service(
                        web::resource("")
                            .route(web::get().to(admin::list_admins))
                            .route(web::post().to(admin::create_admin)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(admin::update_admin))
                            .route(web::delete().to(admin::delete_admin)),
                    ),
            )
            .service(
                web::scope("/employees")
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/departments")
                    .service(
                        web::resource("")
                            .route(web::get().to(department::list_departments))
                            .route(web::post().to(department::create_department)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(department::update_department))
                            .route(web::delete().to(department::delete_department)),
                    ),
            )
            .service(
                web::scope("/events")
                    .service(
                        web::resource("")
                            .route(web::get().to(event::list_events))
                            .route(web::post().to(event::create_event)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(event::update_event))
                            .route(web::delete().to(event::delete_event)),
                    ),
            )
            .service(
                web::scope("/leaves")
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::leave_list))
                            .route(web::post().to(leave::create_leave)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::patch().to(leave::update_leave_status))
                            .route(web::delete().to(leave::delete_leave)),
                    ),
            )
            .service(
                web::scope("/salaries")
                    .service(
                        web::resource("")
                            .route(web::get().to(salary::list_salaries))
                            .route(web::post().to(salary::create_salary)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(salary::update_salary))
                            .route(web::delete().to(salary::delete_salary)),
                    ),
            )
            .service(
                web::scope("/chatbot")
                    .service(web::resource("/send").route(web::post().to(chatbot::send_message))),
            ),
    );
}
