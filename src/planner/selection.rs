use crate::model::Kit;

/// Largest quantity stored for one part (`u32::MAX`). Larger values are
/// clamped so print-list sums stay well inside `u64`.
pub const MAX_QUANTITY: i64 = 4_294_967_295;

/// Requested quantity per part id, in the order ids were first set.
///
/// Quantities are stored as entered, up to [`MAX_QUANTITY`]. Anything below
/// one counts as "not selected" when the print list is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, i64)>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a selection from a kit, keeping the kit's part order.
    #[must_use]
    pub fn from_kit(kit: &Kit) -> Self {
        kit.parts
            .iter()
            .map(|p| (p.part_id.clone(), i64::from(p.qty)))
            .collect()
    }

    /// Sets the quantity for a part. Existing ids keep their position.
    pub fn set(&mut self, part_id: &str, qty: i64) {
        let qty = qty.min(MAX_QUANTITY);
        match self.entries.iter_mut().find(|(id, _)| id == part_id) {
            Some(entry) => entry.1 = qty,
            None => self.entries.push((part_id.to_string(), qty)),
        }
    }

    /// Sets the quantity from user text. Text that is not an integer stores 0.
    pub fn set_raw(&mut self, part_id: &str, text: &str) {
        self.set(part_id, text.trim().parse().unwrap_or(0));
    }

    /// Quantity for a part, 0 when absent.
    #[must_use]
    pub fn get(&self, part_id: &str) -> i64 {
        self.entries
            .iter()
            .find(|(id, _)| id == part_id)
            .map_or(0, |(_, qty)| *qty)
    }

    #[must_use]
    pub fn is_selected(&self, part_id: &str) -> bool {
        self.get(part_id) >= 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// Entries with a quantity of at least one.
    pub fn selected(&self) -> impl Iterator<Item = (&str, u64)> {
        self.iter()
            .filter(|(_, qty)| *qty >= 1)
            .map(|(id, qty)| (id, qty.unsigned_abs()))
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selected().next().is_some()
    }

    /// Sum of all selected quantities.
    #[must_use]
    pub fn total_parts(&self) -> u64 {
        self.selected()
            .map(|(_, qty)| qty)
            .fold(0, u64::saturating_add)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Selection {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (id, qty) in iter {
            let id: String = id.into();
            selection.set(&id, qty);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KitPart;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_keeps_first_insertion_position() {
        let mut selection = Selection::new();
        selection.set("curve", 1);
        selection.set("straight", 2);
        selection.set("curve", 5);

        let entries: Vec<(&str, i64)> = selection.iter().collect();
        assert_eq!(entries, vec![("curve", 5), ("straight", 2)]);
    }

    #[test]
    fn non_numeric_text_counts_as_zero() {
        let mut selection = Selection::new();
        selection.set_raw("curve", " 3 ");
        selection.set_raw("straight", "lots");
        selection.set_raw("orbit-left", "2.5");

        assert_eq!(selection.get("curve"), 3);
        assert_eq!(selection.get("straight"), 0);
        assert_eq!(selection.get("orbit-left"), 0);
        assert_eq!(selection.get("missing"), 0);
    }

    #[test]
    fn only_quantities_of_one_or_more_are_selected() {
        let selection: Selection = [("a", 0), ("b", -2), ("c", 4), ("d", 1)]
            .into_iter()
            .collect();

        let selected: Vec<(&str, u64)> = selection.selected().collect();
        assert_eq!(selected, vec![("c", 4), ("d", 1)]);
        assert_eq!(selection.total_parts(), 5);
        assert!(selection.has_selection());
        assert!(!selection.is_selected("b"));
    }

    #[test]
    fn huge_quantities_are_clamped() {
        let mut selection = Selection::new();
        selection.set_raw("curve", "9223372036854775807");
        selection.set("straight", i64::MAX);
        selection.set("orbit-left", -5);

        assert_eq!(selection.get("curve"), MAX_QUANTITY);
        assert_eq!(selection.get("straight"), MAX_QUANTITY);
        assert_eq!(selection.get("orbit-left"), -5);
        assert_eq!(selection.total_parts(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn empty_or_zeroed_selection_has_nothing_selected() {
        let mut selection = Selection::new();
        assert!(!selection.has_selection());
        selection.set("curve", 0);
        assert!(!selection.has_selection());
        selection.set("curve", 2);
        selection.clear();
        assert!(!selection.has_selection());
    }

    #[test]
    fn from_kit_keeps_kit_order() {
        let kit = Kit {
            id: "starter".to_string(),
            name: "Starter".to_string(),
            parts: vec![
                KitPart {
                    part_id: "straight".to_string(),
                    qty: 4,
                },
                KitPart {
                    part_id: "curve".to_string(),
                    qty: 2,
                },
            ],
        };
        let selection = Selection::from_kit(&kit);
        let entries: Vec<(&str, i64)> = selection.iter().collect();
        assert_eq!(entries, vec![("straight", 4), ("curve", 2)]);
    }
}
