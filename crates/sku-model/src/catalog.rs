#![deny(unsafe_code)]

//! Specification catalog types and editing operations.
//!
//! The catalog is an ordered list of [`Specification`]s; edits mutate the
//! list in place and the caller commits the whole snapshot before triggering
//! recalculation of derived SKU codes. Specification names are unique
//! case-insensitively; value labels are unique case-sensitively within their
//! specification.

use serde::{Deserialize, Serialize};

use crate::{IdGenerator, ModelError, Result, SpecId, ValueId};

/// One selectable option within a specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecValue {
    pub id: ValueId,
    /// Human-facing label, the lookup key used by the generator.
    pub display_value: String,
    /// Code fragment substituted into generated SKUs.
    pub sku_fragment: String,
}

/// A named product attribute with an ordered position and selectable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub id: SpecId,
    pub name: String,
    /// Position of this specification's fragment in every generated code.
    /// Ties are broken by slice position.
    pub order: u32,
    pub values: Vec<SpecValue>,
}

impl Specification {
    pub fn new(id: SpecId, name: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            name: name.into(),
            order,
            values: Vec::new(),
        }
    }

    /// Looks up a value by its display label (case-sensitive).
    pub fn value_by_label(&self, label: &str) -> Option<&SpecValue> {
        self.values.iter().find(|v| v.display_value == label)
    }

    pub fn value_by_id(&self, id: &ValueId) -> Option<&SpecValue> {
        self.values.iter().find(|v| &v.id == id)
    }

    /// Appends a new value, rejecting duplicate labels.
    pub fn add_value(
        &mut self,
        label: impl Into<String>,
        fragment: impl Into<String>,
        ids: &mut dyn IdGenerator,
    ) -> Result<ValueId> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ModelError::EmptyLabel);
        }
        if self.value_by_label(&label).is_some() {
            return Err(ModelError::DuplicateValueLabel {
                spec: self.name.clone(),
                label,
            });
        }
        let id = ids.value_id();
        self.values.push(SpecValue {
            id: id.clone(),
            display_value: label,
            sku_fragment: fragment.into(),
        });
        Ok(id)
    }

    /// Renames a value's display label.
    ///
    /// Rows still holding the old label are deliberately left alone; the
    /// generator skips them and the next validation pass reports them as
    /// missing values.
    pub fn rename_value(&mut self, id: &ValueId, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ModelError::EmptyLabel);
        }
        if self
            .values
            .iter()
            .any(|v| &v.id != id && v.display_value == label)
        {
            return Err(ModelError::DuplicateValueLabel {
                spec: self.name.clone(),
                label,
            });
        }
        let value = self.value_mut(id)?;
        value.display_value = label;
        Ok(())
    }

    pub fn set_fragment(&mut self, id: &ValueId, fragment: impl Into<String>) -> Result<()> {
        let value = self.value_mut(id)?;
        value.sku_fragment = fragment.into();
        Ok(())
    }

    pub fn remove_value(&mut self, id: &ValueId) -> Result<SpecValue> {
        let index = self
            .values
            .iter()
            .position(|v| &v.id == id)
            .ok_or_else(|| ModelError::UnknownValue {
                spec: self.name.clone(),
                value: id.to_string(),
            })?;
        Ok(self.values.remove(index))
    }

    fn value_mut(&mut self, id: &ValueId) -> Result<&mut SpecValue> {
        let name = self.name.clone();
        self.values
            .iter_mut()
            .find(|v| &v.id == id)
            .ok_or(ModelError::UnknownValue {
                spec: name,
                value: id.to_string(),
            })
    }
}

/// Looks up a specification by id.
pub fn spec_by_id<'a>(catalog: &'a [Specification], id: &SpecId) -> Option<&'a Specification> {
    catalog.iter().find(|spec| &spec.id == id)
}

pub fn spec_by_id_mut<'a>(
    catalog: &'a mut [Specification],
    id: &SpecId,
) -> Result<&'a mut Specification> {
    catalog
        .iter_mut()
        .find(|spec| &spec.id == id)
        .ok_or_else(|| ModelError::UnknownSpec(id.to_string()))
}

/// Appends a new specification at the end of the generation order.
pub fn add_specification(
    catalog: &mut Vec<Specification>,
    name: impl Into<String>,
    ids: &mut dyn IdGenerator,
) -> Result<SpecId> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(ModelError::EmptyName);
    }
    if name_taken(catalog, &name, None) {
        return Err(ModelError::DuplicateSpecName(name));
    }
    let order = catalog
        .iter()
        .map(|spec| spec.order + 1)
        .max()
        .unwrap_or(0);
    let id = ids.spec_id();
    catalog.push(Specification::new(id.clone(), name, order));
    Ok(id)
}

pub fn rename_specification(
    catalog: &mut [Specification],
    id: &SpecId,
    name: impl Into<String>,
) -> Result<()> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(ModelError::EmptyName);
    }
    if name_taken(catalog, &name, Some(id)) {
        return Err(ModelError::DuplicateSpecName(name));
    }
    let spec = spec_by_id_mut(catalog, id)?;
    spec.name = name;
    Ok(())
}

pub fn remove_specification(catalog: &mut Vec<Specification>, id: &SpecId) -> Result<Specification> {
    let index = catalog
        .iter()
        .position(|spec| &spec.id == id)
        .ok_or_else(|| ModelError::UnknownSpec(id.to_string()))?;
    Ok(catalog.remove(index))
}

/// Moves a specification to `position` and renumbers every `order` field to
/// the contiguous range `0..catalog.len()`.
pub fn reorder_specification(
    catalog: &mut Vec<Specification>,
    id: &SpecId,
    position: usize,
) -> Result<()> {
    if position >= catalog.len() {
        return Err(ModelError::PositionOutOfBounds {
            position,
            len: catalog.len(),
        });
    }
    catalog.sort_by_key(|spec| spec.order);
    let index = catalog
        .iter()
        .position(|spec| &spec.id == id)
        .ok_or_else(|| ModelError::UnknownSpec(id.to_string()))?;
    let spec = catalog.remove(index);
    catalog.insert(position, spec);
    for (order, spec) in catalog.iter_mut().enumerate() {
        spec.order = order as u32;
    }
    Ok(())
}

fn name_taken(catalog: &[Specification], name: &str, except: Option<&SpecId>) -> bool {
    let lowered = name.to_lowercase();
    catalog.iter().any(|spec| {
        except != Some(&spec.id) && spec.name.to_lowercase() == lowered
    })
}
