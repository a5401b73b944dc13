use dropbox_client::{Client, ListFolderOptions, Metadata};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let token = std::env::var("DROPBOX_ACCESS_TOKEN")?;
    let client = Client::builder().with_access_token(token).build()?;

    let folder = client
        .list_folder("", ListFolderOptions::default().with_limit(25))
        .await?;

    for entry in &folder.entries {
        match entry {
            Metadata::File(file) => println!("file   {} ({} bytes)", file.name, file.size),
            Metadata::Folder(folder) => println!("folder {}", folder.name),
            Metadata::Deleted(deleted) => println!("gone   {}", deleted.name),
        }
    }
    if folder.has_more {
        println!("... more entries available (cursor: {})", folder.cursor);
    }

    Ok(())
}
