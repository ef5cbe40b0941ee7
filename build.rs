fn main() {
    #[cfg(windows)]
    {
        if std::path::Path::new("assets/icons/ring.ico").exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/icons/ring.ico");
            res.compile().unwrap();
        } else {
            println!("cargo:warning=ring.ico not found, skipping icon embedding");
        }
    }
}
