//! Ordered collection of named profiles loaded from JSON.

use std::path::Path;

use serde_json::{Map, Value};

use super::error::{ProfileError, ProfileSetError};
use super::model::FilmProfile;
use super::record::ProfileRecord;

/// One named entry: either a usable profile or the reason it is unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEntry {
    pub name: String,
    pub profile: Result<FilmProfile, ProfileError>,
}

/// Profiles in file order.
///
/// A malformed entry is kept with its error so a batch can report it
/// without losing the others.
///
/// # Example
///
/// ```
/// use film_emulation::ProfileSet;
///
/// let json = r#"{
///     "Neutral": {"color_curves": {
///         "R": {"x": [0, 1], "y": [0, 1]},
///         "G": {"x": [0, 1], "y": [0, 1]},
///         "B": {"x": [0, 1], "y": [0, 1]}
///     }},
///     "Broken": {"contrast": 1.2}
/// }"#;
/// let set = ProfileSet::from_json_str(json).unwrap();
/// assert_eq!(set.len(), 2);
/// assert!(set.get("Neutral").unwrap().profile.is_ok());
/// assert!(set.get("Broken").unwrap().profile.is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSet {
    entries: Vec<ProfileEntry>,
}

impl ProfileSet {
    /// Parse a JSON object mapping profile names to profile records.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileSetError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err(ProfileSetError::NotAnObject),
        }
    }

    /// Read and parse a profile set file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileSetError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let entries = map
            .into_iter()
            .map(|(name, value)| {
                let profile = serde_json::from_value::<ProfileRecord>(value)
                    .map_err(|err| ProfileError::Parse(err.to_string()))
                    .and_then(|record| FilmProfile::from_record(&name, &record));
                if let Err(err) = &profile {
                    tracing::debug!(profile = %name, error = %err, "Rejected profile");
                }
                ProfileEntry { name, profile }
            })
            .collect();
        Self { entries }
    }

    /// Build a set from already validated profiles.
    pub fn from_profiles(profiles: impl IntoIterator<Item = FilmProfile>) -> Self {
        let entries = profiles
            .into_iter()
            .map(|profile| ProfileEntry {
                name: profile.name.clone(),
                profile: Ok(profile),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProfileEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    /// Entry by exact name or by id (`"Kodak Gold"` or `"kodak_gold"`).
    pub fn get(&self, name: &str) -> Option<&ProfileEntry> {
        let id = super::profile_id(name);
        self.entries
            .iter()
            .find(|e| e.name == name)
            .or_else(|| self.entries.iter().find(|e| super::profile_id(&e.name) == id))
    }

    /// Number of entries that validated.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.profile.is_ok()).count()
    }

    /// Keep only entries matching one of `names` (by name or id), in set
    /// order. Returns the names that matched nothing.
    pub fn retain_named<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<String> {
        let wanted: Vec<String> = names
            .iter()
            .map(|n| super::profile_id(n.as_ref()))
            .collect();
        let unmatched = names
            .iter()
            .zip(&wanted)
            .filter(|(_, id)| !self.entries.iter().any(|e| &super::profile_id(&e.name) == *id))
            .map(|(n, _)| n.as_ref().to_string())
            .collect();
        self.entries
            .retain(|e| wanted.contains(&super::profile_id(&e.name)));
        unmatched
    }
}

impl<'a> IntoIterator for &'a ProfileSet {
    type Item = &'a ProfileEntry;
    type IntoIter = std::slice::Iter<'a, ProfileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: &str = r#"{
        "R": {"x": [0, 1], "y": [0, 1]},
        "G": {"x": [0, 1], "y": [0, 1]},
        "B": {"x": [0, 1], "y": [0, 1]}
    }"#;

    fn set_json(names: &[&str]) -> String {
        let body: Vec<String> = names
            .iter()
            .map(|n| format!(r#""{n}": {{"color_curves": {IDENTITY}}}"#))
            .collect();
        format!("{{{}}}", body.join(","))
    }

    #[test]
    fn test_preserves_file_order() {
        let set = ProfileSet::from_json_str(&set_json(&["Zeta", "Alpha", "Mid"])).unwrap();
        let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(set.valid_count(), 3);
    }

    #[test]
    fn test_bad_entry_is_isolated() {
        let json = format!(
            r#"{{"Good": {{"color_curves": {IDENTITY}}}, "Bad": {{"color_curves": {IDENTITY}, "contrast": -1}}}}"#
        );
        let set = ProfileSet::from_json_str(&json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.valid_count(), 1);
        assert!(matches!(
            set.get("Bad").unwrap().profile,
            Err(ProfileError::InvalidParameter {
                field: "contrast",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_error_is_per_entry() {
        let json = format!(r#"{{"Good": {{"color_curves": {IDENTITY}}}, "Odd": 42}}"#);
        let set = ProfileSet::from_json_str(&json).unwrap();
        assert!(matches!(
            set.get("Odd").unwrap().profile,
            Err(ProfileError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            ProfileSet::from_json_str("[1, 2]"),
            Err(ProfileSetError::NotAnObject)
        ));
        assert!(matches!(
            ProfileSet::from_json_str("{"),
            Err(ProfileSetError::Json(_))
        ));
    }

    #[test]
    fn test_lookup_by_id() {
        let set = ProfileSet::from_json_str(&set_json(&["Kodak Gold 200"])).unwrap();
        assert!(set.get("kodak_gold_200").is_some());
        assert!(set.get("Kodak Gold 200").is_some());
        assert!(set.get("Portra").is_none());
    }

    #[test]
    fn test_retain_named() {
        let mut set = ProfileSet::from_json_str(&set_json(&["A One", "B Two", "C Three"])).unwrap();
        let unmatched = set.retain_named(&["c_three", "A One", "Nope"]);
        let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A One", "C Three"]);
        assert_eq!(unmatched, vec!["Nope".to_string()]);
    }

    #[test]
    fn test_from_path_reports_io() {
        let err = ProfileSet::from_path("/nonexistent/profiles.json").unwrap_err();
        assert!(matches!(err, ProfileSetError::Io(_)));
    }
}
