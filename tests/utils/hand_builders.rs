// ============================================================================
// Hand File Builder
// ============================================================================

pub struct HandFileBuilder {
    lines: Vec<String>,
}

#[allow(dead_code)]
impl HandFileBuilder {
    pub fn new() -> Self {
        Self { lines: vec![] }
    }

    /// Five players where P2 wins alone with 33
    pub fn with_sample_hands(self) -> Self {
        self.with_player("P1", &["AS", "2H"])
            .with_player("P2", &["KS", "KH"])
            .with_player("P3", &["QD", "QC"])
            .with_player("P4", &["10S"])
            .with_player("P5", &["3C"])
    }

    /// Five players where alice and david tie on 17
    pub fn with_tied_hands(self) -> Self {
        self.with_player("alice", &["KS"])
            .with_player("bob", &["2C", "3C"])
            .with_player("charlie", &["QH"])
            .with_player("david", &["10D", "3D"])
            .with_player("erin", &["5S"])
    }

    pub fn with_player(self, name: &str, cards: &[&str]) -> Self {
        let line = format!("{}:{}", name, cards.join(","));
        self.with_line(&line)
    }

    /// Adds a raw line, malformed or not
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn replace_line(mut self, index: usize, line: &str) -> Self {
        self.lines[index] = line.to_string();
        self
    }

    pub fn truncate(mut self, len: usize) -> Self {
        self.lines.truncate(len);
        self
    }

    pub fn build(self) -> String {
        let mut contents = self.lines.join("\n");
        contents.push('\n');
        contents
    }
}
