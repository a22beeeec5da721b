//! Integration tests: error.
#[cfg(test)]
mod tests {
    use startup_stories_shared::BackendError;

    #[test]
    fn rejected_token_is_unauthenticated() {
        let body = r#"{"message":"JWT expired","code":"PGRST301"}"#;
        assert_eq!(BackendError::from_response(401, body, false), BackendError::Unauthenticated);
        assert_eq!(BackendError::from_response(401, "", true), BackendError::Unauthenticated);
    }

    #[test]
    fn single_row_misses_are_not_found() {
        let body = r#"{"message":"JSON object requested, multiple (or no) rows returned"}"#;
        assert_eq!(BackendError::from_response(406, body, true), BackendError::NotFound);
        assert_eq!(BackendError::from_response(404, "", true), BackendError::NotFound);
    }

    #[test]
    fn list_reads_keep_404_as_http() {
        let err = BackendError::from_response(404, r#"{"message":"relation does not exist"}"#, false);
        assert_eq!(
            err,
            BackendError::Http {
                status: 404,
                message: "relation does not exist".to_string(),
            }
        );
    }

    #[test]
    fn rest_body_prefers_message_then_details() {
        let with_message = r#"{"message":"duplicate key value","code":"23505","details":"Key (slug) exists","hint":null}"#;
        assert_eq!(
            BackendError::from_response(409, with_message, false).user_message(),
            "duplicate key value"
        );

        let details_only = r#"{"details":"Key (slug) exists"}"#;
        assert_eq!(
            BackendError::from_response(409, details_only, false).user_message(),
            "Key (slug) exists"
        );
    }

    #[test]
    fn auth_body_message_is_surfaced() {
        let grant = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            BackendError::from_response(400, grant, false),
            BackendError::Http {
                status: 400,
                message: "Invalid login credentials".to_string(),
            }
        );

        let signup = r#"{"code":422,"msg":"User already registered"}"#;
        assert_eq!(
            BackendError::from_response(422, signup, false).user_message(),
            "User already registered"
        );
    }

    #[test]
    fn unparseable_body_is_kept_verbatim() {
        assert_eq!(
            BackendError::from_response(502, "Bad Gateway", false),
            BackendError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn empty_http_message_falls_back_to_display() {
        let err = BackendError::from_response(500, "", false);
        assert_eq!(err.user_message(), "HTTP 500: ");
    }
}
