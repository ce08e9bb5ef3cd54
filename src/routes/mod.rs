// Route exports
pub mod predict;

use actix_web::web;

// The frontend posts the form to the service root, so routes are not
// namespaced under an API scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(predict::configure);
}
