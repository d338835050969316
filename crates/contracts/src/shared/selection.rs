//! Single-slot selection backing the detail overlay.

/// The record currently shown in a page's detail overlay.
///
/// Opening a record while another is open replaces it; there is never more
/// than one selection per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSelection<T> {
    current: Option<T>,
}

impl<T> Default for DetailSelection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> DetailSelection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, record: T) {
        self.current = Some(record);
    }

    /// No-op when nothing is open.
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_previous() {
        let mut sel = DetailSelection::new();
        sel.open("a");
        sel.open("b");
        assert_eq!(sel.current(), Some(&"b"));
        assert!(sel.is_open());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut sel: DetailSelection<&str> = DetailSelection::new();
        sel.close();
        assert_eq!(sel, DetailSelection::default());
        assert!(!sel.is_open());

        sel.open("a");
        sel.close();
        sel.close();
        assert!(sel.current().is_none());
    }
}
