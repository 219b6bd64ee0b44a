//! Library integration tests.

use addany::AddAnyError;

#[test]
fn error_types_are_public() {
    let err = AddAnyError::FileExists {
        path: "Order.cs".into(),
    };
    assert!(err.to_string().contains("Order.cs"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> addany::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use addany::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["addany", "list", "--json"]);
    if let Commands::List(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn project_context_is_implementable() {
    use addany::project::ProjectContext;
    use std::path::{Path, PathBuf};

    struct Fixed(PathBuf);

    impl ProjectContext for Fixed {
        fn root_folder(&self) -> &Path {
            &self.0
        }

        fn root_namespace(&self) -> &str {
            "Custom"
        }
    }

    let project = Fixed(PathBuf::from("/work/app"));
    assert_eq!(
        project.make_relative(Path::new("/work/app/a/b")),
        Some(PathBuf::from("a/b"))
    );
}
