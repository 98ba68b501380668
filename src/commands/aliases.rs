//! The shorthand alias table.
//!
//! Maps each abbreviated command to the git subcommand it stands for, the
//! preset arguments baked into the shorthand, an optional entity-type
//! override for index resolution, and whether the alias prints the indexed
//! collection when invoked without arguments.

use crate::core::entity::EntityType;

/// Everything the dispatcher needs to run one shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSpec {
    /// Underlying git subcommand.
    pub base: &'static str,
    /// Arguments baked into the shorthand, placed before user arguments.
    pub preset: &'static [&'static str],
    /// Entity type to resolve indices against, overriding the persisted
    /// active type. `None` means use the active type.
    pub override_type: Option<EntityType>,
    /// Print the indexed entity collection when invoked with no arguments.
    pub lists_collection: bool,
    pub help: &'static str,
}

const fn spec(
    base: &'static str,
    preset: &'static [&'static str],
    override_type: Option<EntityType>,
    lists_collection: bool,
    help: &'static str,
) -> AliasSpec {
    AliasSpec {
        base,
        preset,
        override_type,
        lists_collection,
        help,
    }
}

/// Resolve a shorthand alias to its spec.
pub fn lookup(alias: &str) -> Option<AliasSpec> {
    use EntityType::{Branch, Path, Tag};

    let spec = match alias {
        // Add
        "add" | "a" => spec("add", &[], Some(Path), false, "\"git add\" with path index support"),
        "aa" => spec("add", &["-A"], Some(Path), false, "\"git add -A\" shorthand"),
        "au" => spec("add", &["-u"], Some(Path), false, "\"git add -u\" shorthand"),

        // Blame
        "blame" | "bl" => spec("blame", &[], Some(Path), false, "\"git blame\" shorthand"),

        // Branch
        "branch" | "b" => spec("branch", &[], Some(Branch), true, "list indexed branches"),
        "ba" => spec("branch", &["-a"], Some(Branch), false, "\"git branch -a\" shorthand"),
        "bd" => spec("branch", &["-d"], Some(Branch), false, "\"git branch -d\" shorthand"),
        "bD" => spec("branch", &["-D"], Some(Branch), false, "\"git branch -D\" shorthand"),

        // Clean
        "clean" | "cl" => spec("clean", &[], None, false, "\"git clean\" shorthand"),
        "clf" => spec("clean", &["-fd"], None, false, "\"git clean -fd\" shorthand"),

        // Checkout
        "checkout" | "co" => spec("checkout", &[], None, false, "\"git checkout\" with index support"),
        "cob" => spec("checkout", &["-b"], None, false, "\"git checkout -b\" shorthand"),
        "com" => spec("checkout", &["master"], None, false, "checkout master"),

        // Commit
        "commit" | "c" => spec("commit", &[], None, false, "\"git commit\" shorthand"),
        "ca" => spec("commit", &["-a"], None, false, "\"git commit -a\" shorthand"),
        "ch" => spec("commit", &["-C", "HEAD"], None, false, "\"git commit -C HEAD\" shorthand"),
        "cm" => spec("commit", &["--amend"], None, false, "\"git commit --amend\" shorthand"),
        "cmh" => spec(
            "commit",
            &["--amend", "-C", "HEAD"],
            None,
            false,
            "\"git commit --amend -C HEAD\" shorthand",
        ),

        // Diff
        "diff" | "d" => spec("diff", &["--"], Some(Path), false, "\"git diff\" with path index support"),
        "dw" => spec("diff", &["--word-diff"], Some(Path), false, "\"git diff --word-diff\" shorthand"),
        "dc" => spec("diff", &["--cached", "--"], Some(Path), false, "\"git diff --cached\" shorthand"),
        "dt" => spec("difftool", &[], Some(Path), false, "\"git difftool\" shorthand"),

        // Fetch
        "fetch" | "f" => spec("fetch", &[], None, false, "\"git fetch\" shorthand"),
        "fa" => spec("fetch", &["--all"], None, false, "\"git fetch --all\" shorthand"),

        // Log
        "log" | "l" => spec("log", &[], None, false, "\"git log\" shorthand"),
        "lg" => spec(
            "log",
            &[
                "--graph",
                "--pretty=format:%Cred%h%Creset -%C(yellow)%d%Creset %s %Cgreen(%cr) %C(bold blue)<%an>%Creset",
                "--abbrev-commit",
            ],
            None,
            false,
            "graph log shorthand",
        ),

        // Merge
        "merge" | "m" => spec("merge", &[], Some(Branch), false, "\"git merge\" with branch index support"),
        "mff" => spec("merge", &["--ff"], Some(Branch), false, "\"git merge --ff\" shorthand"),
        "mnff" => spec("merge", &["--no-ff"], Some(Branch), false, "\"git merge --no-ff\" shorthand"),

        // Pull / Push
        "pull" | "pl" => spec("pull", &[], None, false, "\"git pull\" shorthand"),
        "push" | "ps" => spec("push", &[], None, false, "\"git push\" shorthand"),
        "psf" => spec("push", &["-f"], None, false, "\"git push -f\" shorthand"),

        // Remote
        "remote" | "r" => spec("remote", &["-v"], None, false, "\"git remote -v\" shorthand"),

        // Rebase
        "rebase" | "rb" => spec("rebase", &[], Some(Branch), false, "\"git rebase\" with branch index support"),
        "rba" => spec("rebase", &["--abort"], None, false, "\"git rebase --abort\" shorthand"),
        "rbc" => spec("rebase", &["--continue"], None, false, "\"git rebase --continue\" shorthand"),

        // Remove
        "rm" => spec("rm", &[], Some(Path), false, "\"git rm\" with path index support"),

        // Reset
        "reset" | "rs" => spec("reset", &["--"], Some(Path), false, "\"git reset\" with path index support"),
        "rsh" => spec("reset", &["--hard"], None, false, "\"git reset --hard\" shorthand"),
        "rsH" => spec("reset", &["HEAD~"], None, false, "\"git reset HEAD~\" shorthand"),

        // Show
        "show" | "sh" => spec("show", &[], None, false, "\"git show\" shorthand"),
        "shm" => spec("show", &["--summary"], None, false, "\"git show --summary\" shorthand"),

        // Status
        "status" | "s" => spec("status", &[], Some(Path), true, "list indexed modified files"),

        // Stash
        "stash" | "st" => spec("stash", &[], None, false, "\"git stash\" shorthand"),
        "sta" => spec("stash", &["apply"], None, false, "\"git stash apply\" shorthand"),
        "stp" => spec("stash", &["pop"], None, false, "\"git stash pop\" shorthand"),
        "stl" => spec("stash", &["list"], None, false, "\"git stash list\" shorthand"),

        // Tag
        "tag" | "t" => spec("tag", &[], Some(Tag), true, "list indexed tags"),
        "td" => spec("tag", &["-d"], Some(Tag), false, "\"git tag -d\" shorthand"),

        _ => return None,
    };

    Some(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_aliases() {
        let spec = lookup("co").unwrap();
        assert_eq!(spec.base, "checkout");
        assert!(spec.preset.is_empty());
        assert_eq!(spec.override_type, None);

        let spec = lookup("aa").unwrap();
        assert_eq!(spec.base, "add");
        assert_eq!(spec.preset, &["-A"]);
        assert_eq!(spec.override_type, Some(EntityType::Path));
    }

    #[test]
    fn test_long_and_short_forms_agree() {
        assert_eq!(lookup("branch"), lookup("b"));
        assert_eq!(lookup("status"), lookup("s"));
        assert_eq!(lookup("checkout"), lookup("co"));
        assert_eq!(lookup("commit"), lookup("c"));
    }

    #[test]
    fn test_listing_aliases() {
        assert!(lookup("b").unwrap().lists_collection);
        assert!(lookup("s").unwrap().lists_collection);
        assert!(lookup("t").unwrap().lists_collection);
        assert!(!lookup("co").unwrap().lists_collection);
    }

    #[test]
    fn test_case_sensitive_delete_variants() {
        assert_eq!(lookup("bd").unwrap().preset, &["-d"]);
        assert_eq!(lookup("bD").unwrap().preset, &["-D"]);
    }

    #[test]
    fn test_unknown_alias() {
        assert!(lookup("xyz").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_tag_aliases_override_tag_type() {
        assert_eq!(lookup("t").unwrap().override_type, Some(EntityType::Tag));
        assert_eq!(lookup("td").unwrap().override_type, Some(EntityType::Tag));
    }
}
