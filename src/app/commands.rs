/// Everything the assistant understands. Arguments travel separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Delete,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown,
}

impl Command {
    pub fn from_token(token: &str) -> Self {
        match token {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "delete" => Self::Delete,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// Splits a line on whitespace into a lowercased command token and its
/// arguments. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let (command, args) = parse_input("  ADD John   1234567890 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["John", "1234567890"]);

        let (command, args) = parse_input("all").unwrap();
        assert_eq!(command, "all");
        assert!(args.is_empty());

        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn test_arguments_keep_their_case() {
        let (_, args) = parse_input("Phone JOHN").unwrap();
        assert_eq!(args, vec!["JOHN"]);
    }

    #[test]
    fn test_command_tokens() {
        assert_eq!(Command::from_token("add-birthday"), Command::AddBirthday);
        assert_eq!(Command::from_token("close"), Command::Exit);
        assert_eq!(Command::from_token("exit"), Command::Exit);
        assert_eq!(Command::from_token("remove"), Command::Unknown);
    }
}
