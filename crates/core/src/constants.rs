/// Status assigned to every negotiation on creation. Status is free text
/// afterwards; no transition set is enforced.
pub const NEGOTIATION_STATUS_PENDING: &str = "pending";
