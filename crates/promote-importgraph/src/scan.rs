// src/scan.rs
//! Reads the package clause and the import declarations at the top of a
//! source file. Scanning stops at the first declaration that is not an
//! import, so the rest of the file is never looked at.

/// The leading clauses of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub package: String,
    /// Import paths in source order.
    pub imports: Vec<String>,
}

/// A malformed header. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

/// Scans the package clause and every import declaration of `src`.
pub fn scan_header(src: &str) -> Result<FileHeader, ScanError> {
    let mut sc = Scanner::new(src);

    sc.skip_trivia()?;
    if sc.ident().as_deref() != Some("package") {
        return Err(sc.error("expected package clause"));
    }
    sc.skip_trivia()?;
    let package = sc.ident().ok_or_else(|| sc.error("expected package name"))?;

    let mut imports = Vec::new();
    loop {
        sc.skip_trivia()?;
        match sc.ident() {
            Some(keyword) if keyword == "import" => {}
            _ => break,
        }
        sc.skip_trivia()?;
        if sc.eat('(') {
            loop {
                sc.skip_trivia()?;
                if sc.eat(')') {
                    break;
                }
                if sc.at_end() {
                    return Err(sc.error("unterminated import group"));
                }
                imports.push(sc.import_spec()?);
            }
        } else {
            imports.push(sc.import_spec()?);
        }
    }

    Ok(FileHeader { package, imports })
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0, line: 1 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, message: &str) -> ScanError {
        ScanError { line: self.line, message: message.to_string() }
    }

    /// Skips whitespace, semicolons, a byte order mark, and comments.
    fn skip_trivia(&mut self) -> Result<(), ScanError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == ';' || c == '\u{feff}' => {
                    self.bump();
                }
                Some('/') if self.rest().starts_with("//") => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('/') if self.rest().starts_with("/*") => {
                    let start = self.error("unterminated block comment");
                    self.pos += 2;
                    loop {
                        if self.rest().starts_with("*/") {
                            self.pos += 2;
                            break;
                        }
                        if self.bump().is_none() {
                            return Err(start);
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn ident(&mut self) -> Option<String> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return None,
        }
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
        Some(self.src[start..self.pos].to_string())
    }

    /// `["." | name] path`
    fn import_spec(&mut self) -> Result<String, ScanError> {
        if !self.eat('.') {
            self.ident();
        }
        self.skip_trivia()?;
        self.import_path()
    }

    fn import_path(&mut self) -> Result<String, ScanError> {
        let mut path = String::new();
        match self.peek() {
            Some('"') => {
                self.bump();
                loop {
                    match self.bump() {
                        Some('"') => break,
                        Some('\\') => match self.bump() {
                            Some(c @ ('"' | '\\')) => path.push(c),
                            _ => return Err(self.error("unsupported escape in import path")),
                        },
                        Some('\n') | None => return Err(self.error("unterminated import path")),
                        Some(c) => path.push(c),
                    }
                }
            }
            Some('`') => {
                self.bump();
                loop {
                    match self.bump() {
                        Some('`') => break,
                        None => return Err(self.error("unterminated import path")),
                        Some(c) => path.push(c),
                    }
                }
            }
            _ => return Err(self.error("expected import path")),
        }
        if path.is_empty() {
            return Err(self.error("empty import path"));
        }
        Ok(path)
    }
}
