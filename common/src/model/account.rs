/// Ad accounts the current password may report on, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountSelection {
    pub accounts: Vec<String>,
    pub selected: Option<String>,
}

impl AccountSelection {
    /// Builds the selection with the first account preselected, the way a
    /// freshly populated `<select>` behaves.
    pub fn new(accounts: Vec<String>) -> Self {
        let selected = accounts.first().cloned();
        Self { accounts, selected }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Selects `account` if it is part of the list. Returns whether the
    /// selection changed.
    pub fn select(&mut self, account: &str) -> bool {
        if self.selected.as_deref() == Some(account) {
            return false;
        }
        if self.accounts.iter().any(|a| a == account) {
            self.selected = Some(account.to_string());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_account_is_preselected() {
        let selection = AccountSelection::new(vec!["brand-a".into(), "brand-b".into()]);
        assert_eq!(selection.selected.as_deref(), Some("brand-a"));
    }

    #[test]
    fn unknown_account_is_not_selected() {
        let mut selection = AccountSelection::new(vec!["brand-a".into()]);
        assert!(!selection.select("brand-z"));
        assert_eq!(selection.selected.as_deref(), Some("brand-a"));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let selection = AccountSelection::new(Vec::new());
        assert!(selection.is_empty());
        assert_eq!(selection.selected, None);
    }
}
