//! Fixture builders for patch text used across the test modules.

/// Patch-start line with the fixed date `git format-patch` writes.
pub(crate) fn marker_line(hash: &str) -> String {
    format!("From {} Mon Sep 17 00:00:00 2001", hash)
}

/// Builder for a single `git format-patch` style patch.
pub(crate) struct PatchBuilder {
    hash: String,
    author: String,
    date: String,
    subject: String,
    sections: Vec<String>,
}

impl PatchBuilder {
    pub(crate) fn new(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            author: "Jane Doe <jane@example.com>".to_string(),
            date: "Tue, 4 Jun 2024 10:11:12 +0200".to_string(),
            subject: "[PATCH] Test change".to_string(),
            sections: Vec::new(),
        }
    }

    pub(crate) fn author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub(crate) fn subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    /// Append a modified file with one hunk.
    pub(crate) fn modify(mut self, path: &str, hunk_header: &str, body: &[&str]) -> Self {
        let mut section = format!(
            "diff --git a/{path} b/{path}\n\
             index 1111111..2222222 100644\n\
             --- a/{path}\n\
             +++ b/{path}\n\
             {hunk_header}\n"
        );
        for line in body {
            section.push_str(line);
            section.push('\n');
        }
        self.sections.push(section);
        self
    }

    /// Append a newly created file.
    pub(crate) fn create(mut self, path: &str, lines: &[&str]) -> Self {
        let mut section = format!(
            "diff --git a/{path} b/{path}\n\
             new file mode 100644\n\
             index 0000000..2222222\n\
             --- /dev/null\n\
             +++ b/{path}\n\
             @@ -0,0 +1,{} @@\n",
            lines.len()
        );
        for line in lines {
            section.push('+');
            section.push_str(line);
            section.push('\n');
        }
        self.sections.push(section);
        self
    }

    /// Append a pure rename.
    pub(crate) fn rename(mut self, from: &str, to: &str) -> Self {
        self.sections.push(format!(
            "diff --git a/{from} b/{to}\n\
             similarity index 100%\n\
             rename from {from}\n\
             rename to {to}\n"
        ));
        self
    }

    /// Render the patch, including the diffstat separator and mail trailer.
    pub(crate) fn build(&self) -> String {
        let mut text = format!(
            "{}\nFrom: {}\nDate: {}\nSubject: {}\n\nCommit body.\n---\n",
            marker_line(&self.hash),
            self.author,
            self.date,
            self.subject
        );
        for section in &self.sections {
            text.push_str(section);
        }
        text.push_str("-- \n2.45.0\n\n");
        text
    }
}
