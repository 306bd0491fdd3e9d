use packed_bitarray::{BitArrayError, PackedBitArray};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BitArrayError> {
    // RUST_LOG=packed_bitarray=trace shows the array's own events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bits = PackedBitArray::<u32>::new(7);
    println!("new(7)      {bits}");
    bits.set_all(true);
    println!("set_all     {bits}");
    bits.flip_all();
    println!("flip_all    {bits}");
    bits.set(0, true)?;
    println!("set(0)      {bits}");
    bits.set(5, true)?;
    println!("set(5)      {bits}");
    bits.flip(3)?;
    println!("flip(3)     {bits}");
    println!("bits[3]     {}", bits[3]);
    println!("{bits:?}");

    if let Err(err) = bits.get(7) {
        println!("get(7)      {err}");
    }

    Ok(())
}
