/// Test data factories using builder pattern
///
/// Builds employee import files with a header and sensible default rows.
use tekmeals_admin_lib::modules::employee_import::SampleTemplate;

pub struct EmployeeCsvFactory {
    header: String,
    lines: Vec<String>,
}

impl Default for EmployeeCsvFactory {
    fn default() -> Self {
        Self {
            header: SampleTemplate::headers().join(","),
            lines: Vec::new(),
        }
    }
}

impl EmployeeCsvFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    /// A row that passes every rule
    pub fn valid(mut self, name: &str) -> Self {
        let email = format!("{}@tekmeals.test", name.to_lowercase().replace(' ', "."));
        self.lines.push(format!(
            "{},{},9876543210,Pune,Operations,Lunch,Active",
            name, email
        ));
        self
    }

    /// A row with a one-character name
    pub fn short_name(mut self) -> Self {
        self.lines
            .push("A,a@tekmeals.test,,Pune,,Lunch,Active".to_string());
        self
    }

    pub fn bad_email(mut self, name: &str) -> Self {
        self.lines
            .push(format!("{},not-an-email,,Pune,,Lunch,Active", name));
        self
    }

    pub fn no_city(mut self, name: &str) -> Self {
        self.lines
            .push(format!("{},{}@tekmeals.test,,,,Lunch,", name, name.to_lowercase()));
        self
    }

    pub fn no_meal_types(mut self, name: &str) -> Self {
        self.lines
            .push(format!("{},{}@tekmeals.test,,Goa,,,", name, name.to_lowercase()));
        self
    }

    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn blank_line(mut self) -> Self {
        self.lines.push("   ".to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.header;
        text.push('\n');
        for line in self.lines {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}
