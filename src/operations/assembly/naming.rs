/// Display name of a panel: `P.{members}_{length_cm}`, suffixed `_X` when
/// the wall has openings.
///
/// `members` counts the panel's infill members, i.e. everything except the
/// four boundary tracks.
#[must_use]
pub fn panel_name(members: usize, wall_length_cm: f64, has_openings: bool) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let length = wall_length_cm.round() as i64;
    if has_openings {
        format!("P.{members}_{length}_X")
    } else {
        format!("P.{members}_{length}")
    }
}
