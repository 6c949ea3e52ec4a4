/// Renders one child line given the indentation prefix for its own children.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Renders `children` as an outline below the current line.
///
/// Each present child is prefixed with `├─` (or `└─` for the last present
/// child); absent children are skipped, except that a child rendering to the
/// empty string is shown as a bare `│`. Every child line starts with a
/// newline, so the result is appended directly after its parent's label.
///
/// ```
/// use algoviz_util::print_tree;
///
/// let left = |_: &str| "3".to_string();
/// let right = |_: &str| "8".to_string();
/// let out = format!("5{}", print_tree("", &[Some(&left), Some(&right)]));
/// assert_eq!(out, "5\n├─ 3\n└─ 8");
/// ```
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}
