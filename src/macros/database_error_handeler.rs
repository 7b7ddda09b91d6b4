macro_rules! db_handle_get_error_http {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(error) => {
                error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return (
                    Status::InternalServerError,
                    Json(json!({ "error": error.to_string() })),
                );
            }
        }
    };
}

pub(crate) use db_handle_get_error_http;
