pub mod handlers {
    #[path = "upload_handler.rs"]
    pub mod upload_handler;
}

pub mod models {
    #[path = "upload.rs"]
    pub mod upload;
}

pub mod routes {
    #[path = "upload_route.rs"]
    pub mod upload_route;
}

pub mod services {
    #[path = "upload_service.rs"]
    pub mod upload_service;
}

pub mod helpers {
    #[path = "relay_config.rs"]
    pub mod relay_config;

    #[path = "cors.rs"]
    pub mod cors;
}

pub mod errors;
pub mod route;
