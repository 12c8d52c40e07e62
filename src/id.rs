use uuid::Uuid;

/// Fresh entity identifier. UUIDv7, so ids sort roughly by creation
/// time.
pub fn new_uuid_v7() -> String {
    Uuid::now_v7().to_string()
}
