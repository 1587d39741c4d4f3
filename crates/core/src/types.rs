/// All document primary keys are MongoDB ObjectIds.
pub type DbId = bson::oid::ObjectId;

/// All persisted timestamps are BSON datetimes (millisecond UTC).
pub type Timestamp = bson::DateTime;
