//! CLI output rendering
//!
//! Plain-terminal rendering of the taxonomy, the setup guide, and analysis
//! reports. The TUI has its own screens; everything here prints to stdout.

use crate::analysis::AnalysisReport;
use crate::guide::{SETUP_STEPS, AUTO_CLEAN_FILENAME, AUTO_CLEAN_SCRIPT};
use crate::naming::EXAMPLE_SCENARIOS;
use crate::taxonomy::FolderNode;
use crate::theme::Theme;
use crate::utils::pad_right_to_width;

/// Output verbosity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Quiet,   // Only errors
    Normal,  // Standard output
    Verbose, // More details
}

/// Print the folder taxonomy as an indented tree.
pub fn print_tree(forest: &[FolderNode], mode: OutputMode) {
    if mode == OutputMode::Quiet {
        return;
    }
    println!("{}", Theme::header("Recommended Documents structure"));
    println!("{}", Theme::divider_bold(60));
    for node in forest {
        print_node(node, "");
    }
    println!();
    println!(
        "{}",
        Theme::secondary("Recreate this tree inside your Documents folder.")
    );
}

fn print_node(node: &FolderNode, prefix: &str) {
    let label = if node.top_level {
        Theme::emphasis(node.name)
    } else {
        Theme::primary(node.name)
    };
    match node.description {
        Some(desc) => println!("{}{}  {}", prefix, label, Theme::secondary(&format!("— {}", desc))),
        None => println!("{}{}", prefix, label),
    }

    let child_count = node.subfolders.len();
    for (i, child) in node.subfolders.iter().enumerate() {
        let last = i + 1 == child_count;
        let connector = if last { "└── " } else { "├── " };
        let child_prefix = if last { "    " } else { "│   " };
        print!("{}{}", prefix, connector);
        print_child(child, &format!("{}{}", prefix, child_prefix));
    }
}

fn print_child(node: &FolderNode, prefix: &str) {
    println!("{}", Theme::primary(node.name));
    let child_count = node.subfolders.len();
    for (i, child) in node.subfolders.iter().enumerate() {
        let last = i + 1 == child_count;
        let connector = if last { "└── " } else { "├── " };
        let child_prefix = if last { "    " } else { "│   " };
        print!("{}{}", prefix, connector);
        print_child(child, &format!("{}{}", prefix, child_prefix));
    }
}

/// Print the step-by-step setup guide.
pub fn print_steps(mode: OutputMode) {
    if mode == OutputMode::Quiet {
        return;
    }
    println!("{}", Theme::header("Step-by-step setup"));
    println!("{}", Theme::divider_bold(60));
    for (i, step) in SETUP_STEPS.iter().enumerate() {
        println!();
        println!(
            "{} {}  {}",
            Theme::value(&format!("{}.", i + 1)),
            Theme::header(step.title),
            Theme::secondary(&format!("[{}]", step.category.label()))
        );
        println!("   {}", Theme::secondary(step.description));
        for detail in step.details {
            println!("   - {}", Theme::primary(detail));
        }
    }
    println!();
    println!("{}", Theme::header("Scheduled cleanup"));
    println!("{}", Theme::divider(60));
    println!(
        "{}",
        Theme::secondary(&format!("Keep this in a text file named {}:", AUTO_CLEAN_FILENAME))
    );
    println!("{}", Theme::command(AUTO_CLEAN_SCRIPT));
}

/// Print the example filename plus the static scenarios.
pub fn print_naming(filename: &str, mode: OutputMode) {
    if mode == OutputMode::Quiet {
        // Keep the generated name itself; it is the command's output.
        println!("{}", filename);
        return;
    }
    println!("{}", Theme::header("Resulting filename"));
    println!("{}", Theme::success(filename));
    println!();
    println!("{}", Theme::header("Example scenarios"));
    for (title, name) in EXAMPLE_SCENARIOS {
        println!("  {}  {}", pad_right_to_width(title, 14), Theme::command(name));
    }
}

/// Width of the histogram bars in CLI report output.
const BAR_WIDTH: usize = 30;

/// Render a proportional text bar for a producer-supplied percentage.
pub fn text_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((width as f64) * clamped / 100.0).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Print a full analysis report.
pub fn print_report(report: &AnalysisReport, mode: OutputMode) {
    if mode == OutputMode::Quiet {
        return;
    }

    println!("{}", Theme::header("Detected categories"));
    println!("{}", Theme::divider_bold(60));
    let name_width = report
        .categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .clamp(8, 24);
    for cat in &report.categories {
        println!(
            "  {}  {}  {}",
            pad_right_to_width(&cat.name, name_width),
            text_bar(cat.percentage, BAR_WIDTH),
            Theme::secondary(&format!("{} files ({:.0}%)", cat.count, cat.percentage)),
        );
    }

    if !report.problems.is_empty() {
        println!();
        println!("{}", Theme::header("Pain points"));
        println!("{}", Theme::divider(60));
        for problem in &report.problems {
            println!("  {} {}", Theme::warning("•"), problem);
        }
    }

    println!();
    println!("{}", Theme::header("Proposed structure"));
    println!("{}", Theme::divider(60));
    for line in report.proposed_structure.lines() {
        println!("  {}", line);
    }

    if !report.naming_examples.is_empty() {
        println!();
        println!("{}", Theme::header("Rename examples"));
        println!("{}", Theme::divider(60));
        for example in &report.naming_examples {
            println!(
                "  {} {} {}",
                Theme::secondary(&example.old),
                Theme::secondary("->"),
                Theme::success(&example.new)
            );
        }
    }

    println!();
    println!("{}", Theme::header("Deployment script"));
    println!("{}", Theme::divider(60));
    println!("{}", report.powershell_script);

    if mode == OutputMode::Verbose {
        println!();
        println!(
            "{}",
            Theme::secondary("Run the script in PowerShell (not CMD); it reports progress while moving files.")
        );
    }
}
