macro_rules! internal_server_error {
    () => {
        actix_web::HttpResponse::InternalServerError()
            .body("Error within the server that cannot be recovered. Contact administrator")
    };
}

macro_rules! html {
    ($html:ident) => {{
        $html.insert_str(0, "<!DOCTYPE html>");
        actix_web::HttpResponse::Ok()
            .content_type(actix_web::http::header::ContentType::html())
            .body($html)
    }};
}

macro_rules! redirect {
    ($location:expr) => {
        actix_web::HttpResponse::Found()
            .insert_header(("location", $location))
            .finish()
    };
}

macro_rules! redirect_htmx {
    ($location:expr) => {
        actix_web::HttpResponse::Ok()
            .insert_header(("HX-Redirect", $location))
            .finish()
    };
}

pub(crate) use html;
pub(crate) use internal_server_error;
pub(crate) use redirect;
pub(crate) use redirect_htmx;
