use crate::consts;

/// Generate an order id of the form `<unix-millis>-<random suffix>`.
/// The timestamp keeps ids sortable while the suffix keeps concurrent
/// requests within the same millisecond distinct.
pub fn generate_order_id() -> String {
    format!(
        "{}-{}",
        common_utils::date_time::now_unix_millis(),
        common_utils::generate_nanoid(consts::ORDER_ID_SUFFIX_LENGTH)
    )
}
