use actix_web::web;

use crate::service::{record::record_api, root::root_api};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api)
        .service(web::scope("/api/rest").configure(record_api));
}
