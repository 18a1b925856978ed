//! Method parameter descriptors.

use crate::types::DataType;

/// Role a method parameter plays in the query call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Supplies a placeholder value.
    Value,
    /// Supplies paging (offset/limit).
    Paging,
    /// Supplies ordering.
    Sorting,
}

/// Describes one declared parameter of a query method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParameter {
    /// Parameter name; absent when names were not retained at compile time.
    pub name: Option<String>,
    /// 0-based index in the method signature.
    pub index: usize,
    /// Declared type.
    pub data_type: DataType,
    /// Role of the parameter.
    pub kind: ParameterKind,
}

impl MethodParameter {
    /// Creates a value parameter; paging and sorting types get their special kind.
    #[must_use]
    pub fn new(name: Option<String>, index: usize, data_type: DataType) -> Self {
        let kind = match data_type {
            DataType::Page => ParameterKind::Paging,
            DataType::Sort => ParameterKind::Sorting,
            _ => ParameterKind::Value,
        };
        MethodParameter {
            name,
            index,
            data_type,
            kind,
        }
    }

    /// Creates a named parameter.
    #[must_use]
    pub fn named(name: impl Into<String>, index: usize, data_type: DataType) -> Self {
        Self::new(Some(name.into()), index, data_type)
    }

    /// Creates a parameter without a name.
    #[must_use]
    pub fn unnamed(index: usize, data_type: DataType) -> Self {
        Self::new(None, index, data_type)
    }

    /// Returns the name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the parameter has a name.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Returns true if the parameter supplies a placeholder value.
    #[must_use]
    pub fn is_bindable(&self) -> bool {
        self.kind == ParameterKind::Value
    }
}

/// Ordered list of the parameters of a query method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    parameters: Vec<MethodParameter>,
}

impl Parameters {
    /// Creates a parameter list; indexes are reassigned in declaration order.
    #[must_use]
    pub fn new(parameters: Vec<MethodParameter>) -> Self {
        let parameters = parameters
            .into_iter()
            .enumerate()
            .map(|(index, p)| MethodParameter { index, ..p })
            .collect();
        Parameters { parameters }
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if the method declares no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Returns the parameter at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MethodParameter> {
        self.parameters.get(index)
    }

    /// Returns the parameters that supply placeholder values.
    pub fn bindable(&self) -> impl Iterator<Item = &MethodParameter> {
        self.parameters.iter().filter(|p| p.is_bindable())
    }

    /// Iterates parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodParameter> {
        self.parameters.iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a MethodParameter;
    type IntoIter = std::slice::Iter<'a, MethodParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}
