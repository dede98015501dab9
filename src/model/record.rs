use super::types::Element;

/// Element layout of a thermodynamic data file.
///
/// Produced by [`crate::io::read_elements`]. `declared_elements` is the count
/// stated in the file header; `elements` holds only the symbols that passed
/// periodic-table validation, so the two may differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    pub elements: Vec<Element>,
    pub declared_elements: usize,
    pub phase_count: usize,
}

impl ElementRecord {
    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of header entries that were discarded during validation.
    #[inline]
    pub fn dropped_count(&self) -> usize {
        self.declared_elements.saturating_sub(self.elements.len())
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.elements.iter().map(Element::symbol).collect()
    }

    pub fn atomic_numbers(&self) -> Vec<u8> {
        self.elements.iter().map(Element::atomic_number).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_symbols() {
        let record = ElementRecord {
            elements: vec![Element::Cr, Element::Cl],
            declared_elements: 3,
            phase_count: 1,
        };

        assert_eq!(record.element_count(), 2);
        assert_eq!(record.dropped_count(), 1);
        assert_eq!(record.symbols(), vec!["Cr", "Cl"]);
        assert_eq!(record.atomic_numbers(), vec![24, 17]);
    }
}
