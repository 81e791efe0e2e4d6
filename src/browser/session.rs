//! One live WebDriver connection to the portal, exclusively owned by the run.

use async_trait::async_trait;
use std::time::Duration;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use tracing::debug;

use super::driver::{DriverError, DriverResult, Locator, PortalPage, ScopedSession};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub webdriver_url: String,
    pub headless: bool,
    pub element_timeout: Duration,
    pub poll_interval: Duration,
}

pub struct PortalSession {
    driver: WebDriver,
    element_timeout: Duration,
    poll_interval: Duration,
}

impl PortalSession {
    /// Launch a Chrome session against the WebDriver endpoint. The caller
    /// that opens the session is responsible for calling [`ScopedSession::close`]
    /// on every exit path; dropping without closing leaves the browser running.
    pub async fn open(options: &SessionOptions) -> DriverResult<Self> {
        debug!(target = "roombook", url = %options.webdriver_url, headless = options.headless, "opening browser session");

        let mut caps = DesiredCapabilities::chrome();
        if options.headless {
            caps.add_arg("--headless=new")?;
            caps.add_arg("--window-size=1920,1080")?;
        } else {
            caps.add_arg("--start-maximized")?;
        }
        caps.add_arg("--disable-gpu")?;

        let driver = WebDriver::new(options.webdriver_url.as_str(), caps)
            .await
            .map_err(|e| DriverError::SessionLaunch(e.to_string()))?;

        Ok(PortalSession {
            driver,
            element_timeout: options.element_timeout,
            poll_interval: options.poll_interval,
        })
    }

    fn by(locator: &Locator) -> By {
        match locator {
            Locator::Id(value) => By::Id(value.clone()),
            Locator::Css(value) => By::Css(value.clone()),
        }
    }
}

#[async_trait]
impl ScopedSession for PortalSession {
    async fn close(self) -> DriverResult<()> {
        debug!(target = "roombook", "closing browser session");
        self.driver.quit().await?;
        Ok(())
    }
}

#[async_trait]
impl PortalPage for PortalSession {
    type Element = WebElement;

    async fn navigate(&self, url: &str) -> DriverResult<()> {
        self.driver
            .goto(url)
            .await
            .map_err(|e| DriverError::Navigation {
                url: url.to_string(),
                source: anyhow::Error::new(e),
            })
    }

    async fn current_url(&self) -> DriverResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn wait_for(&self, locator: &Locator) -> DriverResult<WebElement> {
        self.driver
            .query(Self::by(locator))
            .wait(self.element_timeout, self.poll_interval)
            .first()
            .await
            .map_err(|_| DriverError::ElementWait {
                locator: locator.to_string(),
                waited_ms: self.element_timeout.as_millis() as u64,
            })
    }

    async fn is_present(&self, locator: &Locator) -> DriverResult<bool> {
        let found = self.driver.find_all(Self::by(locator)).await?;
        Ok(!found.is_empty())
    }

    async fn click(&self, element: &WebElement) -> DriverResult<()> {
        element.click().await?;
        Ok(())
    }

    async fn fill(&self, element: &WebElement, text: &str) -> DriverResult<()> {
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    async fn select_option(&self, element: &WebElement, value: &str) -> DriverResult<()> {
        let select = SelectElement::new(element).await?;
        select.select_by_value(value).await?;
        Ok(())
    }
}
