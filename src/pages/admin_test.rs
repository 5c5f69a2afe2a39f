use super::*;

#[test]
fn grade_list_failed_message_formats_status() {
    assert_eq!(grade_list_failed_message(404), "grade list failed: 404");
    assert_eq!(grade_list_failed_message(503), "grade list failed: 503");
}
