use anyhow::Result;

use desktop_postinstall::preflight::check_host_tools;

fn main() -> Result<()> {
    println!("Checking for post-install host tools...");
    check_host_tools()?;
    println!("All tools found.");
    Ok(())
}
