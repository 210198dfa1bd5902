/*!
# `RUN [<line number>]`

## Purpose
Starts the program.

## Remarks
Variables are cleared first. Without a line number the program
starts from its first line. When it ends the report shows the last line
run.

## Example
```text
10 PRINT "HELLO"
RUN
HELLO
0/10
```

*/
