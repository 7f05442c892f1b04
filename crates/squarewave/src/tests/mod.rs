mod prescaler;
