#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/rscoreboard.ico deve esistere
    let mut res = WindowsResource::new();
    res.set_icon("res/rscoreboard.ico")
        .set("FileDescription", "rScoreboard CLI")
        .set("ProductName", "rScoreboard")
        .set("OriginalFilename", "rscoreboard.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
