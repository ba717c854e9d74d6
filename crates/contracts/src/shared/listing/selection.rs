/// Flips `id` in a selection list, keeping the order of the remaining ids.
pub fn toggle_id(selected: &[String], id: &str) -> Vec<String> {
    if selected.iter().any(|s| s == id) {
        selected.iter().filter(|s| *s != id).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let selected = toggle_id(&[], "a");
        assert_eq!(selected, vec!["a"]);

        let selected = toggle_id(&selected, "b");
        assert_eq!(selected, vec!["a", "b"]);

        let selected = toggle_id(&selected, "a");
        assert_eq!(selected, vec!["b"]);
    }
}
