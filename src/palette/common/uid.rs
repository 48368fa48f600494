/// Root used for UIDs derived from a random 128-bit value.
pub const UUID_DERIVED_ROOT: &str = "2.25.";

/// Generates a UID by appending a random 128-bit integer, in decimal, to `root`.
pub fn generate_uid(root: &str) -> String {
    format!("{}{}", root, rand::random::<u128>())
}
