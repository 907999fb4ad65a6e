use polars::prelude::DataFrame;

pub const TRANSACTION_ID: &str = "transaction_id";
pub const CUSTOMER_ID: &str = "customer_id";
pub const DEVICE_ID: &str = "device_id";
pub const NAME: &str = "name";

/// The six caller-supplied source tables, keyed as follows: locations, flags
/// and time records are 1-to-1 with transactions on `transaction_id`; devices
/// are unique per `device_id`; customers are unique per `customer_id`.
#[derive(Debug, Clone)]
pub struct RawTables {
    pub transactions: DataFrame,
    pub locations: DataFrame,
    pub customers: DataFrame,
    pub flags: DataFrame,
    pub time_records: DataFrame,
    pub devices: DataFrame,
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|col| col.as_str() == name)
}
