/// Integer bucket of wall-clock time. A code derived for a slot is accepted
/// during that slot and the one after it, so effective validity runs between
/// one and two slot widths depending on when inside the slot it was issued.
pub type TimeSlot = i64;

/// Width of one verification slot in milliseconds (5 minutes).
pub const SLOT_MILLIS: i64 = 5 * 60 * 1000;

/// Length of a verification code in decimal digits.
pub const CODE_LEN: usize = 6;
