use super::Gateway;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// Upgrades `/ws` to a WebSocket and hands the socket to the gateway.
pub async fn connect(
    gateway: web::Data<Gateway>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, frames)) => {
            gateway.bridge(session, frames);
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
