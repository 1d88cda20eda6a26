use std::borrow::Cow;

/// An astropy-compatible unit: its string form as astropy prints it and
/// its physical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AstropyUnit {
    pub name: &'static str,
    pub physical_type: &'static str,
}

impl AstropyUnit {
    const fn new(name: &'static str, physical_type: &'static str) -> Self {
        Self {
            name,
            physical_type,
        }
    }
}

/// Units found in mapped tables and their astropy equivalents.
pub static UNIT_MAPPING: [(&str, AstropyUnit); 30] = [
    ("deg", AstropyUnit::new("deg", "angle")),
    ("rad", AstropyUnit::new("rad", "angle")),
    ("hourangle", AstropyUnit::new("hourangle", "angle")),
    ("arcmin", AstropyUnit::new("arcmin", "angle")),
    ("arcsec", AstropyUnit::new("arcsec", "angle")),
    ("mas", AstropyUnit::new("mas", "angle")),
    ("uas", AstropyUnit::new("uas", "angle")),
    ("pc", AstropyUnit::new("pc", "length")),
    ("kpc", AstropyUnit::new("kpc", "length")),
    ("Mpc", AstropyUnit::new("Mpc", "length")),
    ("AU", AstropyUnit::new("AU", "length")),
    ("km", AstropyUnit::new("km", "length")),
    ("m", AstropyUnit::new("m", "length")),
    ("s", AstropyUnit::new("s", "time")),
    ("min", AstropyUnit::new("min", "time")),
    ("h", AstropyUnit::new("h", "time")),
    ("d", AstropyUnit::new("d", "time")),
    ("yr", AstropyUnit::new("yr", "time")),
    ("mas/yr", AstropyUnit::new("mas / yr", "angular speed")),
    ("arcsec/yr", AstropyUnit::new("arcsec / yr", "angular speed")),
    ("deg/yr", AstropyUnit::new("deg / yr", "angular speed")),
    ("km/s", AstropyUnit::new("km / s", "speed")),
    ("m/s", AstropyUnit::new("m / s", "speed")),
    ("mag", AstropyUnit::new("mag", "dimensionless")),
    ("Jy", AstropyUnit::new("Jy", "spectral flux density")),
    ("mJy", AstropyUnit::new("mJy", "spectral flux density")),
    ("K", AstropyUnit::new("K", "temperature")),
    ("Hz", AstropyUnit::new("Hz", "frequency")),
    ("Angstrom", AstropyUnit::new("Angstrom", "length")),
    ("nm", AstropyUnit::new("nm", "length")),
];

/// Looks up the astropy equivalent of a unit string.
///
/// # Example
///
/// ```
/// use mivot_util::lookup_unit;
///
/// assert_eq!(lookup_unit("km/s").unwrap().physical_type, "speed");
/// assert!(lookup_unit("furlong/fortnight").is_none());
/// ```
pub fn lookup_unit(unit: &str) -> Option<&'static AstropyUnit> {
    UNIT_MAPPING
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, astropy)| astropy)
}

/// Separators between the components of a compound unit.
const UNIT_SEPARATORS: [char; 4] = ['/', '.', ' ', '*'];

/// Rewrites the `year` spelling used by early VizieR annotations
/// (`mas/year`) into the `yr` symbol.
///
/// Only a whole `year` component is rewritten: time formats such as
/// `jyear` or `decimalyear` are left alone.
///
/// # Example
///
/// ```
/// use mivot_util::fix_legacy_unit;
///
/// assert_eq!(fix_legacy_unit("mas/year"), "mas/yr");
/// assert_eq!(fix_legacy_unit("jyear"), "jyear");
/// assert_eq!(fix_legacy_unit("deg"), "deg");
/// ```
pub fn fix_legacy_unit(unit: &str) -> Cow<'_, str> {
    if !unit.split(UNIT_SEPARATORS).any(|part| part == "year") {
        return Cow::Borrowed(unit);
    }
    let mut fixed = String::with_capacity(unit.len());
    let mut rest = unit;
    while let Some(at) = rest.find(UNIT_SEPARATORS) {
        push_component(&mut fixed, &rest[..at]);
        // separators are all ASCII
        fixed.push_str(&rest[at..=at]);
        rest = &rest[at + 1..];
    }
    push_component(&mut fixed, rest);
    Cow::Owned(fixed)
}

fn push_component(out: &mut String, part: &str) {
    out.push_str(if part == "year" { "yr" } else { part });
}
