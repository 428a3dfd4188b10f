use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: &'static str,
    pub order: SortOrder,
}

/// Per-table interaction state: the search box and the sorted column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableState {
    pub search: String,
    pub sort: Option<SortState>,
}

impl TableState {
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Same column flips the order; a new column starts ascending.
    pub fn toggle_sort(&mut self, column: &'static str) -> SortState {
        let next = match self.sort {
            Some(current) if current.column == column => SortState {
                column,
                order: current.order.reversed(),
            },
            _ => SortState {
                column,
                order: SortOrder::Asc,
            },
        };
        self.sort = Some(next);
        next
    }

    pub fn order_of(&self, column: &str) -> Option<SortOrder> {
        self.sort
            .filter(|sort| sort.column == column)
            .map(|sort| sort.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_between_orders() {
        let mut state = TableState::default();
        assert_eq!(state.toggle_sort("name").order, SortOrder::Asc);
        assert_eq!(state.toggle_sort("name").order, SortOrder::Desc);
        assert_eq!(state.toggle_sort("name").order, SortOrder::Asc);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut state = TableState::default();
        state.toggle_sort("name");
        state.toggle_sort("name");
        let sort = state.toggle_sort("code");
        assert_eq!(sort, SortState { column: "code", order: SortOrder::Asc });
        assert_eq!(state.order_of("name"), None);
        assert_eq!(state.order_of("code"), Some(SortOrder::Asc));
    }
}
