pub mod health_check_controller;
pub mod hello_controller;
pub mod http_server;
pub mod static_controller;
