//! CLI for issuing one JSON request through the template.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use xrest_core::config;
use xrest_core::HttpTemplate;

use commands::{run_get, run_post};

/// Top-level CLI for the xrest request template.
#[derive(Debug, Parser)]
#[command(name = "xrest")]
#[command(about = "xrest: send a JSON request and print the decoded reply", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// GET a URL and print the JSON reply.
    Get {
        url: String,
        /// Extra request header, `Name: value` (repeatable).
        #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
        headers: Vec<(String, String)>,
        /// Query parameter, `name=value` (repeatable).
        #[arg(short = 'F', long = "form", value_name = "PARAM", value_parser = parse_param)]
        form: Vec<(String, String)>,
    },

    /// POST to a URL and print the JSON reply.
    Post {
        url: String,
        /// Raw request body. If absent, the form parameters are sent as the body.
        #[arg(short, long)]
        data: Option<String>,
        /// Extra request header, `Name: value` (repeatable).
        #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
        headers: Vec<(String, String)>,
        /// Form parameter, `name=value` (repeatable).
        #[arg(short = 'F', long = "form", value_name = "PARAM", value_parser = parse_param)]
        form: Vec<(String, String)>,
    },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got {:?}", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {:?}", s));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got {:?}", s))?;
    Ok((name.to_string(), value.to_string()))
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let template = HttpTemplate::from_config(&cfg);

        match cli.command {
            CliCommand::Get { url, headers, form } => run_get(&template, &url, headers, form)?,
            CliCommand::Post {
                url,
                data,
                headers,
                form,
            } => run_post(&template, &url, data.as_deref(), headers, form)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
