//! usb-switch CLI: one-shot control of a USB HID relay switch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use usb_switch_core::device::Identity;
use usb_switch_core::hid::HidSwitch;
use usb_switch_core::port::SwitchPort;
use usb_switch_core::report::SwitchState;
use usb_switch_core::sequence::{self, RESTART_DELAY};

#[derive(Parser)]
#[command(
    name = "usb-switch",
    version,
    about = "Power-cycle a single-channel USB HID relay switch"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch off, wait two seconds, switch back on (the default).
    Cycle,
    /// Switch the relay off.
    Off,
    /// Switch the relay on.
    On,
    /// Show device identity and enumeration info.
    Info {
        /// Emit machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Cycle) {
        Commands::Cycle => {
            let mut port = HidSwitch::open()?;
            let identity = port.identity()?;
            print_identity(&identity);

            sequence::power_cycle(&mut port, RESTART_DELAY, |phase| {
                println!("{}", phase.announcement());
            })?;
        }
        Commands::Off => set_state(SwitchState::Off)?,
        Commands::On => set_state(SwitchState::On)?,
        Commands::Info { json } => {
            let port = HidSwitch::open()?;
            let identity = port.identity()?;

            if json {
                let output = serde_json::json!({
                    "device": port.info(),
                    "identity": identity,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let unknown = "(unknown)";
                println!(
                    "Manufacturer: {}",
                    identity.manufacturer.as_deref().unwrap_or(unknown)
                );
                println!(
                    "Product:      {}",
                    identity.product.as_deref().unwrap_or(unknown)
                );
                println!(
                    "Serial:       {}",
                    identity.serial.as_deref().unwrap_or(unknown)
                );
                println!(
                    "Device:       VID 0x{:04X}, PID 0x{:04X}, path {}",
                    port.info().vid,
                    port.info().pid,
                    port.info().path
                );
            }
        }
    }

    Ok(())
}

/// Print the three identity strings, one per line, as the original tool did.
/// Descriptor strings the firmware does not provide print as empty lines.
fn print_identity(identity: &Identity) {
    println!("{}", identity.manufacturer.as_deref().unwrap_or(""));
    println!("{}", identity.product.as_deref().unwrap_or(""));
    println!("{}", identity.serial.as_deref().unwrap_or(""));
}

/// Open the switch, write a single state report, and release the handle.
fn set_state(state: SwitchState) -> Result<()> {
    let mut port = HidSwitch::open()?;
    port.set_blocking(true)?;

    let outcome = sequence::set_switch(&mut port, state);
    port.close();
    outcome?;

    println!("turn {state}..");
    Ok(())
}
