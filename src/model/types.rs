use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of elements in the periodic table (H through Og).
pub const ELEMENT_COUNT: usize = 118;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

impl ParseElementError {
    /// The symbol text that failed to match the periodic table.
    pub fn symbol(&self) -> &str {
        &self.0
    }
}

/// A chemical element, discriminated by its atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
    Cs,
    Ba,
    La,
    Ce,
    Pr,
    Nd,
    Pm,
    Sm,
    Eu,
    Gd,
    Tb,
    Dy,
    Ho,
    Er,
    Tm,
    Yb,
    Lu,
    Hf,
    Ta,
    W,
    Re,
    Os,
    Ir,
    Pt,
    Au,
    Hg,
    Tl,
    Pb,
    Bi,
    Po,
    At,
    Rn,
    Fr,
    Ra,
    Ac,
    Th,
    Pa,
    U,
    Np,
    Pu,
    Am,
    Cm,
    Bk,
    Cf,
    Es,
    Fm,
    Md,
    No,
    Lr,
    Rf,
    Db,
    Sg,
    Bh,
    Hs,
    Mt,
    Ds,
    Rg,
    Cn,
    Nh,
    Fl,
    Mc,
    Lv,
    Ts,
    Og = 118,
}

/// Canonical symbols, indexed by `atomic_number - 1`.
const SYMBOLS: [&str; ELEMENT_COUNT] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

const ELEMENTS: [Element; ELEMENT_COUNT] = [
    Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C, Element::N,
    Element::O, Element::F, Element::Ne, Element::Na, Element::Mg, Element::Al, Element::Si,
    Element::P, Element::S, Element::Cl, Element::Ar, Element::K, Element::Ca, Element::Sc,
    Element::Ti, Element::V, Element::Cr, Element::Mn, Element::Fe, Element::Co, Element::Ni,
    Element::Cu, Element::Zn, Element::Ga, Element::Ge, Element::As, Element::Se, Element::Br,
    Element::Kr, Element::Rb, Element::Sr, Element::Y, Element::Zr, Element::Nb, Element::Mo,
    Element::Tc, Element::Ru, Element::Rh, Element::Pd, Element::Ag, Element::Cd, Element::In,
    Element::Sn, Element::Sb, Element::Te, Element::I, Element::Xe, Element::Cs, Element::Ba,
    Element::La, Element::Ce, Element::Pr, Element::Nd, Element::Pm, Element::Sm, Element::Eu,
    Element::Gd, Element::Tb, Element::Dy, Element::Ho, Element::Er, Element::Tm, Element::Yb,
    Element::Lu, Element::Hf, Element::Ta, Element::W, Element::Re, Element::Os, Element::Ir,
    Element::Pt, Element::Au, Element::Hg, Element::Tl, Element::Pb, Element::Bi, Element::Po,
    Element::At, Element::Rn, Element::Fr, Element::Ra, Element::Ac, Element::Th, Element::Pa,
    Element::U, Element::Np, Element::Pu, Element::Am, Element::Cm, Element::Bk, Element::Cf,
    Element::Es, Element::Fm, Element::Md, Element::No, Element::Lr, Element::Rf, Element::Db,
    Element::Sg, Element::Bh, Element::Hs, Element::Mt, Element::Ds, Element::Rg, Element::Cn,
    Element::Nh, Element::Fl, Element::Mc, Element::Lv, Element::Ts, Element::Og,
];

impl Element {
    /// Every element in order of increasing atomic number.
    pub fn all() -> &'static [Element; ELEMENT_COUNT] {
        &ELEMENTS
    }

    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    /// Looks up an element by atomic number (1-based).
    pub fn from_atomic_number(z: u8) -> Option<Element> {
        (z as usize)
            .checked_sub(1)
            .and_then(|idx| ELEMENTS.get(idx))
            .copied()
    }

    pub fn symbol(&self) -> &'static str {
        SYMBOLS[*self as usize - 1]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Matches the canonical symbol exactly; `"cr"` and `"CR"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOLS
            .iter()
            .position(|&sym| sym == s)
            .map(|idx| ELEMENTS[idx])
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("Cr").unwrap(), Element::Cr);
        assert_eq!(Element::from_str("Cl").unwrap(), Element::Cl);
        assert_eq!(Element::from_str("Og").unwrap(), Element::Og);
    }

    #[test]
    fn element_from_str_is_case_sensitive() {
        let err = Element::from_str("cl").unwrap_err();
        assert_eq!(err.symbol(), "cl");
        assert_eq!(
            err.to_string(),
            "invalid or unsupported element symbol: 'cl'"
        );
        assert!(Element::from_str("CL").is_err());
    }

    #[test]
    fn pseudo_elements_are_not_in_the_table() {
        assert!(Element::from_str("e(g)").is_err());
        assert!(Element::from_str("").is_err());
        assert!(Element::from_str("Va").is_err());
    }

    #[test]
    fn atomic_numbers_follow_table_order() {
        for (idx, el) in Element::all().iter().enumerate() {
            assert_eq!(el.atomic_number() as usize, idx + 1);
            assert_eq!(Element::from_str(el.symbol()).unwrap(), *el);
        }
        assert_eq!(Element::Na.atomic_number(), 11);
        assert_eq!(Element::Cr.atomic_number(), 24);
        assert_eq!(Element::Og.atomic_number(), 118);
    }

    #[test]
    fn from_atomic_number_bounds() {
        assert_eq!(Element::from_atomic_number(1), Some(Element::H));
        assert_eq!(Element::from_atomic_number(17), Some(Element::Cl));
        assert_eq!(Element::from_atomic_number(118), Some(Element::Og));
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(119), None);
    }

    #[test]
    fn display_matches_symbol() {
        assert_eq!(Element::Fe.to_string(), "Fe");
        assert_eq!(format!("{}", Element::Ts), "Ts");
    }
}
