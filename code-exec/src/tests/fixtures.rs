/// Language ids in the order a catalog file would list them
pub mod catalog {
    pub const LANGUAGES: &[&str] = &[
        "assembly-nasm",
        "bash",
        "c-clang",
        "c-gcc",
        "cpp-clang",
        "cpp-gcc",
        "cs-core",
        "cs-csi",
        "cs-mono",
        "cs-mono-shell",
        "java-openjdk",
        "javascript-node",
        "kotlin",
        "python1",
        "python2",
        "python3",
        "python3-pypy",
        "rust",
    ];

    pub const DEFAULTS: &[(&str, &str)] = &[
        ("assembly", "assembly-nasm"),
        ("c", "c-gcc"),
        ("cpp", "cpp-gcc"),
        ("cs", "cs-core"),
        ("java", "java-openjdk"),
        ("javascript", "javascript-node"),
        ("python", "python3"),
    ];
}

/// Submission bodies as people type them in chat
pub mod submissions {
    pub const PYTHON_FENCED: &str = "```py\nprint(\"Hello from Python!\")\n```";

    pub const PYTHON_WITH_INPUT: &str = r#"input Test User
name = input()
print(f"Hello, {name}!")"#;

    pub const C_WITH_DIRECTIVES: &str = r#"--wrapped input 3
compiler-flags `-O2 -Wall`
command-line-options -v
arguments one two
int n; scanf("%d", &n); printf("%d\n", n * 2); return 0;"#;

    pub const CSI_WRAPPED: &str = "--wrapped Console.WriteLine(1);";

    pub const JS_WITH_STATS: &str = "--stats console.log(1)";
}

/// Raw text as returned by the execution backend
pub mod backend_output {
    pub const STATS_TRAILER: &str =
        "\nReal time: 0.051 s\nUser time: 0.036 s\nSys. time: 0.013 s\nCPU share: 95.34 %\nExit code: 0";

    pub const MARKDOWN_OUTPUT: &str = "```rust\nfn main() {}\n```";
}
