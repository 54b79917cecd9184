/// Narrows the people list by search term and person selector.
///
/// `search_term` is matched case-insensitively as a substring (empty matches
/// everyone); a non-empty `selected_person` only lets that exact name
/// through. Both must hold. Input order is preserved.
pub fn filter_people<S: AsRef<str>>(
    all_people: &[S],
    search_term: &str,
    selected_person: &str,
) -> Vec<String> {
    let needle = search_term.to_lowercase();

    all_people
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|person| person.to_lowercase().contains(&needle))
        .filter(|person| selected_person.is_empty() || *person == selected_person)
        .map(str::to_string)
        .collect()
}
