use saborbr_shared::GroceryList;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
    pub percent: f64,
}

pub fn progress(list: &GroceryList) -> Progress {
    let total = list.items.len();
    let checked = list.items.iter().filter(|i| i.checked).count();
    let percent = if total > 0 {
        checked as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    Progress {
        checked,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saborbr_shared::GroceryItem;

    #[test]
    fn test_progress() {
        let mut list = GroceryList::new(
            "Lista",
            vec![
                GroceryItem::new("Ovos", 2.0, "un", None),
                GroceryItem::new("Leite", 1.0, "l", None),
                GroceryItem::new("Sal", 1.0, "un", None),
                GroceryItem::new("Alho", 6.0, "dentes", None),
            ],
        );
        list.items[0].checked = true;

        let p = progress(&list);
        assert_eq!(p.checked, 1);
        assert_eq!(p.total, 4);
        assert_eq!(p.percent, 25.0);
    }

    #[test]
    fn test_empty_list_progress_is_zero() {
        let p = progress(&GroceryList::new("Lista", vec![]));
        assert_eq!(p.total, 0);
        assert_eq!(p.percent, 0.0);
    }
}
