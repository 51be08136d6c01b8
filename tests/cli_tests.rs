use clap::Parser;
use dsa_lab::cli::{Cli, Commands};

#[cfg(test)]
mod cli_parsing_tests {
    use super::*;

    #[test]
    fn test_every_subcommand_parses() {
        let cases: [(&str, fn(&Commands) -> bool); 8] = [
            ("brackets", |c| matches!(c, Commands::Brackets)),
            ("postfix", |c| matches!(c, Commands::Postfix)),
            ("reverse-list", |c| matches!(c, Commands::ReverseList)),
            ("doubly-list", |c| matches!(c, Commands::DoublyList)),
            ("traverse", |c| matches!(c, Commands::Traverse)),
            ("heap", |c| matches!(c, Commands::Heap)),
            ("dijkstra", |c| matches!(c, Commands::Dijkstra)),
            ("sort", |c| matches!(c, Commands::Sort)),
        ];

        for (name, check) in cases {
            let cli = Cli::try_parse_from(["dsa-lab", name]).unwrap();
            assert!(check(&cli.command), "subcommand {} parsed wrong", name);
            assert!(!cli.demo_only);
        }
    }

    #[test]
    fn test_demo_only_flag_is_global() {
        let cli = Cli::try_parse_from(["dsa-lab", "sort", "--demo-only"]).unwrap();
        assert!(cli.demo_only);
        assert!(matches!(cli.command, Commands::Sort));

        let cli = Cli::try_parse_from(["dsa-lab", "--demo-only", "heap"]).unwrap();
        assert!(cli.demo_only);
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["dsa-lab"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["dsa-lab", "quicksort"]).is_err());
    }
}
