use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn job_endpoints_embed_job_id() {
    assert_eq!(job_endpoint("j-1"), "/api/jobs/j-1");
    assert_eq!(job_apply_endpoint("j-1"), "/api/jobs/j-1/apply");
    assert_eq!(job_save_endpoint("j-1"), "/api/jobs/j-1/save");
}

#[test]
fn company_endpoints_embed_company_id() {
    assert_eq!(company_endpoint("c-7"), "/api/companies/c-7");
    assert_eq!(company_follow_endpoint("c-7"), "/api/companies/c-7/follow");
}

#[test]
fn notification_read_endpoint_embeds_id() {
    assert_eq!(notification_read_endpoint("n-3"), "/api/notifications/n-3/read");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn request_failed_message_names_operation_and_status() {
    assert_eq!(request_failed_message("login", 401), "login request failed: 401");
    assert_eq!(request_failed_message("company setup", 422), "company setup request failed: 422");
}

// =============================================================
// Payload shapes
// =============================================================

#[test]
fn register_payload_serializes_role_wire_name() {
    let payload = RegisterPayload {
        email: "a@b.com",
        password: "pw",
        name: "Alice",
        role: crate::net::types::Role::JobSeeker,
    };
    let json = serde_json::to_value(&payload).expect("json");
    assert_eq!(json["role"], "job_seeker");
}

#[test]
fn change_password_payload_uses_camel_case_keys() {
    let payload = ChangePasswordPayload { current_password: "old", new_password: "new" };
    let json = serde_json::to_value(&payload).expect("json");
    assert_eq!(json["currentPassword"], "old");
    assert_eq!(json["newPassword"], "new");
}
