use std::collections::HashMap;

use crate::column::StratigraphicColumn;
use crate::math::Point2;

/// The basal contact of a unit: the curve separating it from the unit
/// immediately below in stratigraphic order, keyed by the upper unit's name.
///
/// May be absent for the lowest exposed unit; a degenerate geometry (fewer
/// than two distinct vertices) counts as absent.
#[derive(Debug, Clone)]
pub struct BasalContact {
    pub unit_name: String,
    pub vertices: Vec<Point2>,
}

impl BasalContact {
    /// Creates a contact for the base of `unit_name` from polyline vertices.
    #[must_use]
    pub fn new(unit_name: impl Into<String>, vertices: Vec<Point2>) -> Self {
        Self { unit_name: unit_name.into(), vertices }
    }

    /// Whether the contact carries usable geometry: at least two vertices
    /// that are not all coincident.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        if self.vertices.len() < 2 {
            return false;
        }
        let first = self.vertices[0];
        self.vertices.iter().any(|v| {
            ((v.x - first.x).powi(2) + (v.y - first.y).powi(2)).sqrt() > crate::math::TOLERANCE
        })
    }
}

/// The basal contacts of a map area, keyed by unit name. Possibly sparse:
/// a missing entry means the unit is unconstrained at its base.
#[derive(Debug, Clone, Default)]
pub struct ContactSet {
    contacts: HashMap<String, BasalContact>,
}

impl ContactSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact, replacing any previous contact for the same unit.
    pub fn insert(&mut self, contact: BasalContact) {
        self.contacts.insert(contact.unit_name.clone(), contact);
    }

    /// The basal contact of `unit_name`, if present and usable.
    #[must_use]
    pub fn basal_of(&self, unit_name: &str) -> Option<&BasalContact> {
        self.contacts.get(unit_name).filter(|c| c.is_usable())
    }
}

impl FromIterator<BasalContact> for ContactSet {
    fn from_iter<I: IntoIterator<Item = BasalContact>>(iter: I) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

/// The bounding contacts of one unit, as resolved against the column.
///
/// `lower` is the unit's own basal contact; `upper` is the basal contact of
/// the unit above. Either side may be unbounded.
#[derive(Debug, Clone, Copy)]
pub struct UnitBounds<'a> {
    pub lower: Option<&'a BasalContact>,
    pub upper: Option<&'a BasalContact>,
}

impl UnitBounds<'_> {
    /// Whether both bounding contacts are present, i.e. a thickness can be
    /// attempted for this unit.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }
}

/// Resolves the bounding contacts of the unit at `position` in the column.
///
/// The topmost unit has no unit above and is unbounded on top; the bottommost
/// unit has no unit below and is unbounded at its base, even if the contact
/// data carries a spurious entry keyed by it. A unit name with no contact
/// data at all resolves to both sides unbounded rather than an error. Pure
/// lookup over immutable inputs.
#[must_use]
pub fn resolve_bounds<'a>(
    column: &StratigraphicColumn,
    contacts: &'a ContactSet,
    position: usize,
) -> UnitBounds<'a> {
    // A basal contact separates two adjacent column units, so each side
    // requires the corresponding neighbor to exist.
    let lower = if column.below(position).is_some() {
        column
            .unit(position)
            .and_then(|u| contacts.basal_of(&u.name))
    } else {
        None
    };
    let upper = column
        .above(position)
        .and_then(|u| contacts.basal_of(&u.name));
    UnitBounds { lower, upper }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::StratigraphicUnit;

    fn column() -> StratigraphicColumn {
        StratigraphicColumn::new(vec![
            StratigraphicUnit::new("G", 2),
            StratigraphicUnit::new("F", 1),
            StratigraphicUnit::new("E", 0),
        ])
        .unwrap_or_else(|_| unreachable!("valid column"))
    }

    fn line(unit: &str, x: f64) -> BasalContact {
        BasalContact::new(unit, vec![Point2::new(x, 0.0), Point2::new(x, 100.0)])
    }

    #[test]
    fn middle_unit_is_bounded_by_own_and_upper_basal() {
        let contacts: ContactSet = [line("G", 0.0), line("F", 130.0)].into_iter().collect();
        let col = column();

        let bounds = resolve_bounds(&col, &contacts, 1);
        assert!(bounds.is_bounded());
        assert_eq!(bounds.lower.map(|c| c.unit_name.as_str()), Some("F"));
        assert_eq!(bounds.upper.map(|c| c.unit_name.as_str()), Some("G"));
    }

    #[test]
    fn column_extremes_are_unbounded() {
        let contacts: ContactSet = [line("G", 0.0), line("F", 130.0)].into_iter().collect();
        let col = column();

        // Topmost: no unit above.
        assert!(!resolve_bounds(&col, &contacts, 0).is_bounded());
        // Bottommost: no basal contact of its own.
        assert!(!resolve_bounds(&col, &contacts, 2).is_bounded());
    }

    #[test]
    fn spurious_contact_for_bottommost_unit_is_ignored() {
        // E is the base of the column: it has no neighbor below, so a
        // contact keyed by it cannot bound anything.
        let contacts: ContactSet = [line("G", 0.0), line("F", 130.0), line("E", 400.0)]
            .into_iter()
            .collect();
        let col = column();

        let bounds = resolve_bounds(&col, &contacts, 2);
        assert!(bounds.lower.is_none());
        assert!(!bounds.is_bounded());
    }

    #[test]
    fn missing_contact_data_means_unbounded_not_error() {
        let contacts = ContactSet::new();
        let col = column();
        for pos in 0..col.len() {
            let b = resolve_bounds(&col, &contacts, pos);
            assert!(b.lower.is_none() && b.upper.is_none());
        }
    }

    #[test]
    fn degenerate_contact_counts_as_absent() {
        let mut contacts = ContactSet::new();
        // Single vertex.
        contacts.insert(BasalContact::new("F", vec![Point2::new(1.0, 1.0)]));
        // All vertices coincident.
        contacts.insert(BasalContact::new(
            "G",
            vec![Point2::new(2.0, 2.0), Point2::new(2.0, 2.0)],
        ));
        assert!(contacts.basal_of("F").is_none());
        assert!(contacts.basal_of("G").is_none());
        assert!(!resolve_bounds(&column(), &contacts, 1).is_bounded());
    }
}
