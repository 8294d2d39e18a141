#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub source: String,
    pub dest: String,
    pub is_person_name: bool,
}

impl DictEntry {
    pub fn new(source: &str, dest: &str, is_person_name: bool) -> Self {
        Self {
            source: source.to_string(),
            dest: dest.to_string(),
            is_person_name,
        }
    }

    /// The same pair read in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.dest.clone(),
            dest: self.source.clone(),
            is_person_name: self.is_person_name,
        }
    }
}
