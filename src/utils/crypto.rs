//! Identifier generation for the mock payment flow

use rand::RngCore;

/// Bytes of entropy per generated identifier
const ID_BYTES: usize = 12;

fn random_hex() -> String {
    let mut bytes = [0u8; ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Generate a mock payment order identifier
pub fn generate_order_id() -> String {
    format!("order_{}", random_hex())
}

/// Generate a mock payment identifier
pub fn generate_payment_id() -> String {
    format!("pay_{}", random_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_format() {
        let id = generate_order_id();
        assert!(id.starts_with("order_"));
        assert_eq!(id.len(), "order_".len() + ID_BYTES * 2);
    }

    #[test]
    fn test_payment_id_format() {
        let id = generate_payment_id();
        assert!(id.starts_with("pay_"));
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = generate_order_id();
        let b = generate_order_id();
        assert_ne!(a, b);
    }
}
