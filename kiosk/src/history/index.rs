//! Customer name → history lookup

use std::collections::HashMap;

use shared::OrderRecord;

/// Records grouped by exact customer name
///
/// Built in one pass; each group keeps file order. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerIndex {
    by_name: HashMap<String, Vec<OrderRecord>>,
    /// Names in order of first appearance
    names: Vec<String>,
}

impl CustomerIndex {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a OrderRecord>,
    {
        let mut index = Self::default();
        for record in records {
            match index.by_name.get_mut(&record.customer_name) {
                Some(group) => group.push(record.clone()),
                None => {
                    index.names.push(record.customer_name.clone());
                    index
                        .by_name
                        .insert(record.customer_name.clone(), vec![record.clone()]);
                }
            }
        }
        index
    }

    /// All records for `name`, or `None` if the customer never ordered
    pub fn lookup(&self, name: &str) -> Option<&[OrderRecord]> {
        self.by_name.get(name).map(Vec::as_slice)
    }

    /// Number of distinct customers
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn customers(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
