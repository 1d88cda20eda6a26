/// Names of the astropy `Time` formats.
pub const TIME_FORMATS: [&str; 20] = [
    "jd",
    "mjd",
    "decimalyear",
    "unix",
    "unix_tai",
    "cxcsec",
    "gps",
    "plot_date",
    "stardate",
    "datetime",
    "ymdhms",
    "iso",
    "isot",
    "yday",
    "datetime64",
    "fits",
    "byear",
    "jyear",
    "byear_str",
    "jyear_str",
];

/// Returns true when `unit` names an astropy time format.
///
/// # Example
///
/// ```
/// use mivot_util::is_time_format;
///
/// assert!(is_time_format("mjd"));
/// assert!(!is_time_format("MJD"));
/// assert!(!is_time_format("deg"));
/// ```
pub fn is_time_format(unit: &str) -> bool {
    TIME_FORMATS.contains(&unit)
}
