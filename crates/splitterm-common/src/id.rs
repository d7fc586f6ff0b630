/// Generate a fresh node/session id.
///
/// Layout node ids double as session keys, so they must be unique across
/// every tab's tree.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
